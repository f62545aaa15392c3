pub mod compute_raster;
