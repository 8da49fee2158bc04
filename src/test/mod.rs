mod test_util;
mod test_session;
