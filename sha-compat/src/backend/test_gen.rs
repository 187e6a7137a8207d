/// Tests every backend must pass, checked against the `sha1` crate.
macro_rules! backend_tests {
    ($backend:ty) => {

    };
}
