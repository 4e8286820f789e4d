/// Runs a statement and logs how long it took at `info` level.
#[macro_export]
macro_rules! time_it {
    ($comment:literal => $stmt:stmt) => {{
        $crate::time_it!(concat!($comment, "") => {$stmt})
    }};
    ($comment:expr => $stmt:stmt) => {{
        let start = std::time::Instant::now();
        let result = { $stmt };
        let duration = start.elapsed();
        log::info!("{} => {:?}", $comment, duration);
        result
    }};
}
