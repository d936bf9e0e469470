/// Work handed off to the actions service. Actions are executed strictly in
/// send order, which is what keeps the output log in invocation order even
/// under rapid repeated runs.
#[derive(Debug, Clone)]
pub enum Action {
    RunCode { language: String, source: String },
    OpenPreview { language: String, source: String },
}
