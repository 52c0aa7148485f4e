mod result_vm;
mod screen_vm;

pub use result_vm::{NOT_ANSWERED, ResultVm, ReviewItemVm, format_percentage};
pub use screen_vm::{ListItemVm, QuestionVm, QuizzesVm, ScreenVm, SubjectsVm};
