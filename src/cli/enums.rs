//! CLI enum types for the resize filter option.

use clap::ValueEnum;

use crate::ascii::ResizeFilter;

/// Resampling filter for the resize stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Filter {
    Nearest,
    Triangle,
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<Filter> for ResizeFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Nearest => ResizeFilter::Nearest,
            Filter::Triangle => ResizeFilter::Triangle,
            Filter::CatmullRom => ResizeFilter::CatmullRom,
            Filter::Gaussian => ResizeFilter::Gaussian,
            Filter::Lanczos3 => ResizeFilter::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_to_resize_filter() {
        assert_eq!(ResizeFilter::from(Filter::Nearest), ResizeFilter::Nearest);
        assert_eq!(ResizeFilter::from(Filter::Triangle), ResizeFilter::Triangle);
        assert_eq!(
            ResizeFilter::from(Filter::CatmullRom),
            ResizeFilter::CatmullRom
        );
        assert_eq!(ResizeFilter::from(Filter::Gaussian), ResizeFilter::Gaussian);
        assert_eq!(ResizeFilter::from(Filter::Lanczos3), ResizeFilter::Lanczos3);
    }

    #[test]
    fn test_value_names_match_config_names() {
        for filter in Filter::value_variants() {
            let value = filter.to_possible_value().unwrap();
            assert_eq!(value.get_name(), ResizeFilter::from(*filter).name());
        }
    }
}
