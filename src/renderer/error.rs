use std::error::Error;

#[derive(thiserror::Error, Debug)]
pub enum RendererError<E: Error + 'static> {
    #[error("Graphics device error: {0}")]
    Device(#[source] E),
    #[error("Material range {index_start}+{index_count} reaches past the {index_len} indices of the mesh")]
    InvalidRange {
        index_start: u32,
        index_count: u32,
        index_len: usize,
    },
}
