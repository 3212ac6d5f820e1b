pub mod employee;
pub mod task;
pub mod work_time;
