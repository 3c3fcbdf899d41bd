// One module per DBC construct; each exposes the action(s) bound to its grammar rule.
pub(crate) mod bo_;
pub(crate) mod bo_tx_bu_;
pub(crate) mod bu_;
pub(crate) mod cm_;
pub(crate) mod ns_;
pub(crate) mod sg_;
pub(crate) mod strings;
pub(crate) mod tokens;
pub(crate) mod val_;
pub(crate) mod val_table_;
pub(crate) mod version;
