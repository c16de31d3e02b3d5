mod helpers;
mod overlay_flow;
mod render;
