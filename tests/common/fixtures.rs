// tests/common/fixtures.rs
//! テスト用 PAC ファイル

#![allow(dead_code)]

pub const PAC_WITH_COMMENTS: &str = "// Corporate proxy settings
function FindProxyForURL(url, host) {
    // local hosts
    if (isPlainHostName(host))
        return \"DIRECT\";



    return \"PROXY http://proxy.corp:3128\"; // default
}
";

pub const PAC_WITH_COMMENTS_OPTIMIZED: &str = "
function FindProxyForURL(url, host) {

    if (isPlainHostName(host))
        return \"DIRECT\";

    return \"PROXY http://proxy.corp:3128\"; 
}
";

pub const PAC_CRLF: &str = "function FindProxyForURL(url, host) {\r\n  // direct\r\n\r\n\r\n  return \"DIRECT\";\r\n}\r\n";
