pub mod spec_section;
