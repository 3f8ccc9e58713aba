pub mod badges;
pub mod card_animated;
pub mod explanation_box;
pub mod info_card;
pub mod metric_tile;
pub mod progress_bar;
pub mod rich_text;
pub mod section_header;

pub use badges::AiFitBadge;
pub use card_animated::CardAnimated;
pub use explanation_box::ExplanationBox;
pub use info_card::InfoCard;
pub use metric_tile::MetricTile;
pub use progress_bar::ProgressBar;
pub use rich_text::RichText;
pub use section_header::SectionHeader;
