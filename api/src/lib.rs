pub mod handler;
pub mod model;
pub mod route;
mod view;

#[cfg(test)]
mod test_util;
