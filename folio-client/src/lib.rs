mod comment_tree;
pub use comment_tree::CommentTree;

pub mod display;

mod listing;
pub use listing::{featured, find_portfolio, search, ListingQuery, SortExt, SortKey};

mod settings;
pub use settings::Settings;

mod snapshot;
pub use snapshot::{Snapshot, CATEGORIES};

mod thread_view;
pub use thread_view::{CommentViewState, ThreadView};

mod upload;
pub use upload::{format_file_size, FileKind, NewFile, UploadDraft, UploadedFile};

mod fuzz;

pub mod api {
    pub use folio_api::*;
}
