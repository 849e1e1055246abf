mod controls;
mod details;
mod lookup;
mod panels;
