// 設定管理の具象実装

use crate::core::{FailurePolicy, ListingOrder, ProcessingConfig};

/// デフォルトの並列度
pub const DEFAULT_PARALLELISM: usize = 4;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultProcessingConfig {
    parallelism: usize,
    buffer_size: usize,
    listing_order: ListingOrder,
    failure_policy: FailurePolicy,
    enable_progress: bool,
}

impl DefaultProcessingConfig {
    pub fn new(parallelism: usize) -> Self {
        Self {
            parallelism,
            ..Self::default()
        }
    }

    /// 実行環境のCPU数に合わせた設定
    pub fn for_host() -> Self {
        Self::new(num_cpus::get().max(1))
    }

    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_listing_order(mut self, listing_order: ListingOrder) -> Self {
        self.listing_order = listing_order;
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultProcessingConfig {
    fn default() -> Self {
        Self {
            parallelism: DEFAULT_PARALLELISM,
            buffer_size: 100,
            listing_order: ListingOrder::Listing,
            failure_policy: FailurePolicy::FailFast,
            enable_progress: true,
        }
    }
}

impl ProcessingConfig for DefaultProcessingConfig {
    fn parallelism(&self) -> usize {
        self.parallelism
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn listing_order(&self) -> ListingOrder {
        self.listing_order
    }

    fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}
