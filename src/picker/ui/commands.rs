#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ScheduleSearch(u64), // delay in milliseconds
    CopyToClipboard(String),
    ShowMessage(String),
    ClearMessage,
    Accept, // exit with the active selection
}
