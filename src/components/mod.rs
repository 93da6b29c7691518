//! Page components: the view data each template renders from

mod layout;
mod pages;
mod post_card;
mod tags_page;

pub use layout::Layout;
pub use pages::{Bio, HomePage, PostLink, PostPage, TagIndex, TagLink};
pub use post_card::PostCard;
pub use tags_page::{tag_header, TagsPage};
