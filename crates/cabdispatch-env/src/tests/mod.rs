mod config_tests;
mod rollout_tests;
