use super::*;

#[test]
fn invoke_from_worker_runs_on_ui_thread_and_blocks_for_result() {
    let (queue, handle) = ui_queue::<Vec<u32>>();
    let mut state = Vec::new();

    let worker = std::thread::spawn(move || {
        let a = handle.invoke(|s: &mut Vec<u32>| {
            s.push(1);
            s.len()
        });
        let b = handle.invoke(|s: &mut Vec<u32>| {
            s.push(2);
            s.len()
        });
        (a.unwrap(), b.unwrap())
    });

    queue.run_next(&mut state).unwrap();
    queue.run_next(&mut state).unwrap();
    assert_eq!(worker.join().unwrap(), (1, 2));
    assert_eq!(state, vec![1, 2]);
}

#[test]
fn invoke_on_ui_thread_is_rejected() {
    let (_queue, handle) = ui_queue::<u8>();
    assert!(handle.is_ui_thread());
    let err = handle.invoke(|_: &mut u8| ()).unwrap_err();
    assert!(err.to_string().contains("UI thread"));
}

#[test]
fn pump_is_non_blocking_on_empty_queue() {
    let (queue, _handle) = ui_queue::<u8>();
    let mut state = 0u8;
    assert_eq!(queue.pump(&mut state), 0);
}

#[test]
fn invoke_fails_when_queue_is_gone() {
    let (queue, handle) = ui_queue::<u8>();
    drop(queue);
    let res = std::thread::spawn(move || handle.invoke(|_: &mut u8| 1))
        .join()
        .unwrap();
    assert!(res.is_err());
}

#[test]
fn run_next_fails_when_every_handle_is_dropped() {
    let (queue, handle) = ui_queue::<u8>();
    drop(handle);
    let mut state = 0u8;
    assert!(queue.run_next(&mut state).is_err());
}
