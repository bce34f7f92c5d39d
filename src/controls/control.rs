use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::warn;

use crate::animation::animation_loop::AnimationLoop;
use crate::controls::button::ButtonSkin;
use crate::controls::events::{
    ControlEvent, EventHandlers, EventKind, PointerEvent, SubscriptionId,
};
use crate::controls::icon::IconSlot;
use crate::controls::text::{TextBlock, TextRenderer};
use crate::effects::composite::scale_opacity;
use crate::effects::nine_slice::stretch_nine_slice;
use crate::foundation::core::{HorizontalAlign, IRect, Padding, Point, Size};
use crate::foundation::error::{LayeredError, LayeredResult};
use crate::surface::pixel::{BlendTarget, PixelSurface};

static NEXT_CONTROL_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique control identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u64);

impl ControlId {
    pub(crate) fn next() -> Self {
        Self(NEXT_CONTROL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// What a control draws on top of the common background/children protocol.
#[derive(Clone, Debug, Default)]
pub enum ControlKind {
    /// Background and children only.
    #[default]
    Panel,
    ImageButton(ButtonSkin),
    /// Image button with a caption drawn after its children.
    Button { skin: ButtonSkin, text: TextBlock },
    /// Text over the background; sized to its text.
    Label(TextBlock),
    Icon(IconSlot),
}

/// Renderers available while drawing a frame.
#[derive(Clone, Copy, Default)]
pub struct DrawContext<'a> {
    pub text: Option<&'a dyn TextRenderer>,
}

impl<'a> DrawContext<'a> {
    pub fn with_text(text: &'a dyn TextRenderer) -> Self {
        Self { text: Some(text) }
    }
}

impl std::fmt::Debug for DrawContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawContext")
            .field("text", &self.text.is_some())
            .finish()
    }
}

/// Counters from one draw pass over a subtree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub controls_drawn: usize,
    /// Children whose draw failed and were left out of the frame.
    pub child_failures: usize,
}

impl DrawStats {
    fn merge(&mut self, other: DrawStats) {
        self.controls_drawn += other.controls_drawn;
        self.child_failures += other.child_failures;
    }
}

/// A virtual control: a node of an owned tree with no native window of its own.
///
/// Location is relative to the parent and resolved through [`HorizontalAlign`] against the
/// parent's width. Children paint in insertion order, so the last child is topmost.
#[derive(Debug)]
pub struct Control {
    id: ControlId,
    location: Point,
    size: Size,
    visible: bool,
    enabled: bool,
    opacity: u8,
    padding: Padding,
    align: HorizontalAlign,
    background: Option<Arc<PixelSurface>>,
    background_margins: Padding,
    kind: ControlKind,
    children: Vec<Control>,
    hovered: bool,
    pressed: bool,
    update_locks: u32,
    disposed: bool,
    events: EventHandlers,
}

impl Control {
    pub fn new(kind: ControlKind) -> Self {
        Self {
            id: ControlId::next(),
            location: Point::ZERO,
            size: Size::ZERO,
            visible: true,
            enabled: true,
            opacity: 255,
            padding: Padding::ZERO,
            align: HorizontalAlign::Left,
            background: None,
            background_margins: Padding::ZERO,
            kind,
            children: Vec::new(),
            hovered: false,
            pressed: false,
            update_locks: 0,
            disposed: false,
            events: EventHandlers::default(),
        }
    }

    pub fn panel() -> Self {
        Self::new(ControlKind::Panel)
    }

    pub fn image_button(skin: ButtonSkin) -> Self {
        Self::new(ControlKind::ImageButton(skin))
    }

    pub fn button(skin: ButtonSkin, text: TextBlock) -> Self {
        Self::new(ControlKind::Button { skin, text })
    }

    pub fn label(text: TextBlock) -> Self {
        Self::new(ControlKind::Label(text))
    }

    pub fn icon() -> Self {
        Self::new(ControlKind::Icon(IconSlot::default()))
    }

    pub fn with_location(mut self, x: i32, y: i32) -> Self {
        self.location = Point::new(x, y);
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> LayeredResult<Self> {
        self.set_size(Size::new(width, height))?;
        Ok(self)
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_opacity(mut self, opacity: u8) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_background(mut self, image: Arc<PixelSurface>, margins: Padding) -> Self {
        self.background = Some(image);
        self.background_margins = margins;
        self
    }

    pub fn with_child(mut self, child: Control) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn kind(&self) -> &ControlKind {
        &self.kind
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize. Icons re-provision their backing surface at the new size.
    pub fn set_size(&mut self, size: Size) -> LayeredResult<()> {
        self.size = size;
        if let ControlKind::Icon(slot) = &mut self.kind {
            slot.reprovision(size)?;
        }
        Ok(())
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: u8) {
        self.opacity = opacity;
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    pub fn align(&self) -> HorizontalAlign {
        self.align
    }

    pub fn set_align(&mut self, align: HorizontalAlign) {
        self.align = align;
    }

    pub fn background(&self) -> Option<&Arc<PixelSurface>> {
        self.background.as_ref()
    }

    pub fn set_background(&mut self, image: Option<Arc<PixelSurface>>, margins: Padding) {
        self.background = image;
        self.background_margins = margins;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn button_skin(&self) -> Option<&ButtonSkin> {
        match &self.kind {
            ControlKind::ImageButton(skin) | ControlKind::Button { skin, .. } => Some(skin),
            _ => None,
        }
    }

    pub fn button_skin_mut(&mut self) -> Option<&mut ButtonSkin> {
        match &mut self.kind {
            ControlKind::ImageButton(skin) | ControlKind::Button { skin, .. } => Some(skin),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&TextBlock> {
        match &self.kind {
            ControlKind::Button { text, .. } | ControlKind::Label(text) => Some(text),
            _ => None,
        }
    }

    /// Set the caption of a button or label. Labels take the measured text size as their size.
    pub fn set_text(
        &mut self,
        value: impl Into<String>,
        renderer: &dyn TextRenderer,
    ) -> LayeredResult<()> {
        match &mut self.kind {
            ControlKind::Button { text, .. } => text.set_text(value, renderer),
            ControlKind::Label(text) => {
                text.set_text(value, renderer)?;
                self.size = text.measured();
                Ok(())
            }
            _ => Err(LayeredError::validation("control does not carry text")),
        }
    }

    /// Replace the bitmap of an icon control.
    pub fn set_icon(&mut self, icon: Option<Arc<PixelSurface>>) -> LayeredResult<()> {
        let size = self.size;
        match &mut self.kind {
            ControlKind::Icon(slot) => slot.set_source(icon, size),
            _ => Err(LayeredError::validation("control is not an icon")),
        }
    }

    pub fn children(&self) -> &[Control] {
        &self.children
    }

    pub fn add_child(&mut self, child: Control) -> ControlId {
        let id = child.id;
        self.children.push(child);
        id
    }

    /// Detach a descendant, searching the whole subtree.
    pub fn remove_child(&mut self, id: ControlId) -> Option<Control> {
        if let Some(i) = self.children.iter().position(|c| c.id == id) {
            return Some(self.children.remove(i));
        }
        self.children.iter_mut().find_map(|c| c.remove_child(id))
    }

    pub fn find(&self, id: ControlId) -> Option<&Control> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    pub fn find_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Subscribe to one event kind.
    pub fn on(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&ControlEvent) + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(kind, Box::new(handler))
    }

    pub fn off(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn suspend_update(&mut self) {
        self.update_locks = self.update_locks.saturating_add(1);
    }

    /// Unmatched resumes are ignored.
    pub fn resume_update(&mut self) {
        self.update_locks = self.update_locks.saturating_sub(1);
    }

    pub fn is_update_locked(&self) -> bool {
        self.update_locks > 0
    }

    /// Screen-space rectangle inside a parent whose top-left is `parent_origin`.
    pub fn resolved_bounds(&self, parent_origin: Point, parent_width: i32) -> IRect {
        let x = self
            .align
            .resolve_x(self.location.x, self.size.width, parent_width);
        IRect::new(
            parent_origin.x.saturating_add(x),
            parent_origin.y.saturating_add(self.location.y),
            self.size.width,
            self.size.height,
        )
    }

    /// Whether `p` lands on this control given its resolved `bounds`.
    ///
    /// Disabled and hidden controls are never hit. Both padded edges are inclusive.
    pub fn contains_point(&self, bounds: IRect, p: Point) -> bool {
        if !self.enabled || !self.visible || self.disposed {
            return false;
        }
        let pad = self.padding;
        p.x >= bounds.left() + pad.left
            && p.x <= bounds.right() - pad.right
            && p.y >= bounds.top() + pad.top
            && p.y <= bounds.bottom() - pad.bottom
    }

    /// Advance every running hover ramp in the subtree by one tick. Returns true if anything
    /// changed and the window needs a redraw.
    pub fn tick(&mut self, animation: &mut AnimationLoop) -> bool {
        let mut changed = match self.button_skin_mut() {
            Some(skin) => skin.tick(animation),
            None => false,
        };
        for child in &mut self.children {
            changed |= child.tick(animation);
        }
        changed
    }

    /// Release the subtree: children first, then this control. Repeated calls do nothing.
    pub fn dispose(&mut self, animation: &mut AnimationLoop) {
        if self.disposed {
            return;
        }
        for child in &mut self.children {
            child.dispose(animation);
        }
        self.children.clear();
        match &mut self.kind {
            ControlKind::ImageButton(skin) | ControlKind::Button { skin, .. } => {
                skin.release(animation)
            }
            ControlKind::Icon(slot) => slot.clear(),
            ControlKind::Panel | ControlKind::Label(_) => {}
        }
        self.events.clear();
        self.background = None;
        self.hovered = false;
        self.pressed = false;
        self.visible = false;
        self.enabled = false;
        self.disposed = true;
    }

    /// Paint this subtree into `dest`.
    ///
    /// Hidden, update-locked and disposed controls draw nothing. A child that fails is skipped
    /// and counted; its siblings still draw.
    pub fn draw(
        &self,
        dest: &mut PixelSurface,
        cx: &DrawContext<'_>,
        parent_origin: Point,
        parent_width: i32,
    ) -> LayeredResult<DrawStats> {
        let mut stats = DrawStats::default();
        if self.disposed || !self.visible || self.is_update_locked() {
            return Ok(stats);
        }
        let bounds = self.resolved_bounds(parent_origin, parent_width);

        self.draw_background(dest, bounds);
        if let ControlKind::Label(text) = &self.kind {
            draw_text(dest, cx, text, bounds, self.opacity)?;
        }

        for child in &self.children {
            match child.draw(dest, cx, bounds.origin(), bounds.width) {
                Ok(s) => stats.merge(s),
                Err(err) => {
                    warn!(control = ?child.id, error = %err, "child control failed to draw");
                    stats.child_failures += 1;
                }
            }
        }

        if let ControlKind::Button { text, .. } = &self.kind {
            draw_text(dest, cx, text, text.layout_rect(bounds), self.opacity)?;
        }
        stats.controls_drawn += 1;
        Ok(stats)
    }

    fn draw_background(&self, dest: &mut PixelSurface, bounds: IRect) {
        let margins = self.background_margins;
        match &self.kind {
            ControlKind::ImageButton(skin) | ControlKind::Button { skin, .. } => {
                let normal = self.background.as_ref();
                let base = skin.base_state(self.enabled, self.hovered, self.pressed);
                draw_image(dest, bounds, skin.image_for(base, normal), margins, self.opacity);
                if skin.is_animating() {
                    let overlay = skin.image_for(skin.overlay_state(), normal);
                    let alpha = scale_opacity(self.opacity, skin.ramp().opacity());
                    draw_image(dest, bounds, overlay, margins, alpha);
                }
            }
            ControlKind::Icon(slot) => {
                draw_image(dest, bounds, self.background.as_ref(), margins, self.opacity);
                if slot.source().is_some() {
                    let buffer = slot.buffer();
                    dest.alpha_blend(bounds, buffer, buffer.bounds(), self.opacity);
                }
            }
            ControlKind::Panel | ControlKind::Label(_) => {
                draw_image(dest, bounds, self.background.as_ref(), margins, self.opacity);
            }
        }
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Apply built-in reactions, then notify subscribers and record the event.
    pub(crate) fn fire(
        &mut self,
        kind: EventKind,
        pointer: PointerEvent,
        inside: bool,
        animation: &mut AnimationLoop,
        fired: &mut Vec<ControlEvent>,
    ) {
        let enabled = self.enabled;
        if let Some(skin) = self.button_skin_mut() {
            skin.react(kind, enabled, inside, animation);
        }
        let event = ControlEvent {
            control: self.id,
            kind,
            pointer,
        };
        self.events.emit(&event);
        fired.push(event);
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Control] {
        &mut self.children
    }
}

fn draw_image(
    dest: &mut PixelSurface,
    bounds: IRect,
    image: Option<&Arc<PixelSurface>>,
    margins: Padding,
    opacity: u8,
) {
    if let Some(img) = image {
        stretch_nine_slice(dest, bounds, img, img.bounds(), margins, opacity);
    }
}

fn draw_text(
    dest: &mut PixelSurface,
    cx: &DrawContext<'_>,
    text: &TextBlock,
    rect: IRect,
    opacity: u8,
) -> LayeredResult<()> {
    if text.text().is_empty() || !text.visible {
        return Ok(());
    }
    let renderer = cx
        .text
        .ok_or_else(|| LayeredError::text("no text renderer for a text-bearing control"))?;
    text.draw(dest, renderer, rect, opacity)
}

#[cfg(test)]
#[path = "../../tests/unit/controls/control.rs"]
mod tests;
