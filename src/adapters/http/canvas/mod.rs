//! HTTP adapter for canvas endpoints: contours, factors, catalogs,
//! derived views and strategy advice.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AdviceResponse, AdviceStatusResponse, ApplyPresetRequest, CanvasResponse, ContourResponse,
    ContourSummaryResponse, CreatedResponse, ErrorResponse, FactorResponse, LevelResponse,
    PresetResponse, RenameContourRequest, SelectContourRequest, UpdateFactorRequest,
};
pub use handlers::CanvasAppState;
pub use routes::canvas_routes;
