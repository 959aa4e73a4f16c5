pub(crate) mod activity;
pub(crate) mod collision;
pub(crate) mod needs;
pub(crate) mod transition;
