use apt_filter_domain::filter::FilterOptions;

use crate::args::{Args, OutputFormat, SortKey};

/// Presentation settings for listing output.
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub format: OutputFormat,
    pub sort: Option<SortKey>,
    pub desc: bool,
    pub top: Option<usize>,
    pub count_only: bool,
    pub by_dong: bool,
}

/// Filter constraints taken from the command line.
pub fn filter_options(args: &Args) -> FilterOptions {
    FilterOptions {
        name_query: args.name.clone(),
        districts: args.dong.clone(),
        min_avg_price: args.min_avg_price,
        max_avg_price: args.max_avg_price,
        min_pyeong_price: args.min_pyeong_price,
        max_pyeong_price: args.max_pyeong_price,
        min_transactions: args.min_transactions,
        max_transactions: args.max_transactions,
        only_with_transactions: args.only_with_transactions,
    }
}

pub fn list_options(args: &Args) -> ListOptions {
    ListOptions {
        format: args.format,
        sort: args.sort,
        desc: args.desc,
        top: args.top,
        count_only: args.count_only,
        by_dong: args.by_dong,
    }
}
