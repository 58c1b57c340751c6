mod format_sniffer_test;
mod transcription_result_test;
