//! License header prepended to every bundle
//!
//! The banner is emitted byte for byte, including the trailing blank line.

/// Apache-2.0 banner with the generated-file notice
pub const LICENSE_HEADER: &str = concat!(
    "<!-- Copyright 2015 The TensorFlow Authors. All Rights Reserved.\n",
    "\n",
    "Licensed under the Apache License, Version 2.0 (the \"License\");\n",
    "you may not use this file except in compliance with the License.\n",
    "You may obtain a copy of the License at\n",
    "\n",
    "   http://www.apache.org/licenses/LICENSE-2.0\n",
    "\n",
    "Unless required by applicable law or agreed to in writing, software\n",
    "distributed under the License is distributed on an \"AS IS\" BASIS,\n",
    "WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.\n",
    "See the License for the specific language governing permissions and\n",
    "limitations under the License.\n",
    "============================================================================\n",
    "\n",
    "This file is generated by `gulp` & `vulcanize`. Do not directly change it.\n",
    "Instead, use `gulp regenerate` to create a new version with your changes.\n",
    "-->\n",
    "\n",
);

/// Prepend the license header to flattened output.
pub fn prepend_header(flattened: &str) -> String {
    let mut out = String::with_capacity(LICENSE_HEADER.len() + flattened.len());
    out.push_str(LICENSE_HEADER);
    out.push_str(flattened);
    out
}
