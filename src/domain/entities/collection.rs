/// Binds a schema type to the store collection its records live in.
pub trait Collection {
    const NAME: &'static str;
}
