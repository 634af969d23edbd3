mod hls_probe;
mod selector;
