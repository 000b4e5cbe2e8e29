pub mod stub_curl;
