mod transcode_good;
