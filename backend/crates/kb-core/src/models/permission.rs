/// Capability required by an operation. Checked against a resolved [`crate::Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    View,
    Edit,
    ModifySettings,
    ArchiveBoard,
    DeleteBoard,
    ManageMembers,
}
