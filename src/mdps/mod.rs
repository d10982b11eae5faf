pub mod behavior;
pub mod episode;
pub mod grid_world;
pub mod random_source;
pub mod solvers;
pub mod tables;
