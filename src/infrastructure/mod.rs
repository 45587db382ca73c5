pub mod clipboards;
pub mod dialogs;
pub mod storage;
pub mod surfaces;
