pub(crate) mod dispatcher;
