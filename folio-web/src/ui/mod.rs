mod app;
pub use app::{App, Page};

mod avatar;
pub use avatar::Avatar;

mod comment_thread;
pub use comment_thread::CommentThread;

mod home;
pub use home::Home;

mod navigation;
pub use navigation::Navigation;

mod portfolio_card;
pub use portfolio_card::PortfolioCard;

mod portfolio_detail;
pub use portfolio_detail::PortfolioDetail;

mod portfolio_list;
pub use portfolio_list::PortfolioList;

mod search_bar;
pub use search_bar::SearchBar;

mod upload;
pub use upload::Upload;
