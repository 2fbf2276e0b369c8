pub mod headless_compositor;
