pub mod backlogs;
pub mod builds;
pub mod client;
pub mod hierarchy;
pub mod identities;
pub mod iterations;
pub mod models;
pub mod pipelines;
pub mod projects;
pub mod work_items;
