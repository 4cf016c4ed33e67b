/// Skip a test if AWS credentials are not configured.
#[macro_export]
macro_rules! skip_without_aws {
    () => {
        if std::env::var("AWS_ACCESS_KEY_ID").is_err() {
            eprintln!("SKIPPED: AWS_ACCESS_KEY_ID not set");
            return;
        }
        if std::env::var("SSM2ENV_TEST_PREFIX").is_err() {
            eprintln!("SKIPPED: SSM2ENV_TEST_PREFIX not set (set to a prefix with parameters)");
            return;
        }
    };
}
