mod environment_test;
mod settings_test;
