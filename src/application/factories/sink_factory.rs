use crate::adapters::outbound::console::StderrSupportRequestSink;
use crate::adapters::outbound::filesystem::JsonLinesSupportRequestSink;
use crate::ports::outbound::SupportRequestSink;
use std::path::PathBuf;

/// Where submitted support requests are handed off
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkType {
    Stderr,
    /// Appended as one JSON object per line
    Log(PathBuf),
}

impl SinkType {
    pub fn from_log(log: Option<PathBuf>) -> Self {
        log.map_or(SinkType::Stderr, SinkType::Log)
    }
}

/// Factory for creating support request sinks
pub struct SinkFactory;

impl SinkFactory {
    pub fn create(sink_type: SinkType) -> Box<dyn SupportRequestSink> {
        match sink_type {
            SinkType::Stderr => Box::new(StderrSupportRequestSink::new()),
            SinkType::Log(path) => Box::new(JsonLinesSupportRequestSink::new(path)),
        }
    }
}
