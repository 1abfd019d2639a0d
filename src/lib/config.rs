#[derive(Clone, Debug)]
pub struct Config {
    pub namespace: String,
    pub context: Option<String>,
}

impl Config {
    pub fn new(namespace: String, context: Option<String>) -> Self {
        Self { namespace, context }
    }
}
