mod checklist;
mod print;
mod resources;
mod state;

pub use checklist::ChecklistView;
pub use print::PrintView;
pub use state::{Banner, ViewError};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
