mod checklist_vm;
mod print_vm;
mod summary_vm;
mod time_fmt;

pub use checklist_vm::{CategoryVm, QuestionVm, ScaleOptionVm, map_checklist};
pub use print_vm::{PrintRowVm, PrintSectionVm, PrintVm, map_print};
pub use summary_vm::{SummaryVm, map_summary};
