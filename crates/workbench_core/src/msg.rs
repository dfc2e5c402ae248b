use crate::state::{Insight, OperationError, ReportArtifact, ReportFormat, ValidationContract};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked "Load sample".
    IngestSampleClicked,
    /// User picked a dataset file to upload. The service is the sole
    /// authority on acceptable formats; the bytes are shipped untouched.
    IngestFileChosen { filename: String, bytes: Vec<u8> },
    /// User clicked "Analyze".
    AnalyzeClicked,
    /// User clicked "Insights".
    InsightsClicked,
    /// User requested the report in the given format.
    ReportClicked { format: ReportFormat },
    /// Engine completion for either ingest variant.
    IngestFinished {
        result: Result<(), OperationError>,
    },
    /// Engine completion for contract validation.
    AnalyzeFinished {
        result: Result<ValidationContract, OperationError>,
    },
    /// Engine completion for the insight list.
    InsightsFinished {
        result: Result<Vec<Insight>, OperationError>,
    },
    /// Engine completion for report retrieval.
    ReportFinished {
        result: Result<ReportArtifact, OperationError>,
    },
}
