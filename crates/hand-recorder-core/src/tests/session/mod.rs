mod countdown;
mod recording_session;
mod sample_buffer;
mod session_config;
