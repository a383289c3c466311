use thiserror::Error;

/// Contract violations found while constructing geometry.
///
/// These are never produced while rendering, numerical edge cases during tracing just
/// mean "no hit" or "no contribution".
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Zero length vector")]
    ZeroVector,
    #[error("Points coincide")]
    CoincidentPoints,
    #[error("Points are collinear")]
    CollinearPoints,
    #[error("Polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("Polygon vertex {0} is not on the plane of the first three")]
    NonPlanarVertex(usize),
    #[error("Polygon is not convex at vertex {0}")]
    ConcaveVertex(usize),
    #[error("Polygon vertex {0} lies on a non-adjacent edge")]
    VertexOnEdge(usize),
    #[error("Radius must be positive")]
    NonPositiveRadius,
    #[error("Height must be positive")]
    NonPositiveHeight,
    #[error("Camera up vector is parallel to the view direction")]
    DegenerateCamera,
}
