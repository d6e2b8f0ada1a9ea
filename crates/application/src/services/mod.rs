mod answer_rewriter;
mod upstream_exchanger;

pub use answer_rewriter::AnswerRewriter;
pub use upstream_exchanger::UpstreamExchanger;
