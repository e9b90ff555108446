mod root;
mod route_view;
mod state;

pub(crate) use {route_view::RouteView, state::Route};

pub use root::App;
