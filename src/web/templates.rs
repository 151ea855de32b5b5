/// Static dashboard shell. Data is loaded client-side from `/api/data`.
pub const INDEX_HTML: &str = include_str!("index.html");
