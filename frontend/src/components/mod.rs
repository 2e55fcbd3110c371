pub mod searchable_picker;
pub mod wizard;
