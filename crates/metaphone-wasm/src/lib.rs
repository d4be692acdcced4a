// WASM bindings for the Metaphone 3 encoder.
//
// Provides a `WasmMetaphone` class exported via wasm-bindgen that wraps a
// `Metaphone3` engine. Encodings are serialized to JavaScript objects using
// serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const m = new WasmMetaphone();               // or new WasmMetaphone(true, false, 6)
//   m.encode("Schmidt");                         // => { primary: "XMT", secondary: "SMT" }
//   m.primary("Knight");                         // => "NT"
//   m.soundsLike("Kovacs", "Kovach");            // => true
//   m.setOption("max_length", "4");
//   m.terminate();                               // optional cleanup

use serde::Serialize;
use wasm_bindgen::prelude::*;

use metaphone_core::{EncoderOptions, Encoding, OptionError};
use metaphone3::Metaphone3;

/// Serializable representation of an encoding.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsEncoding {
    primary: String,
    secondary: String,
}

impl From<Encoding> for JsEncoding {
    fn from(e: Encoding) -> Self {
        Self {
            primary: e.primary,
            secondary: e.secondary,
        }
    }
}

fn option_error_to_js(e: OptionError) -> JsError {
    JsError::new(&e.to_string())
}

/// Metaphone 3 encoder for WebAssembly.
#[wasm_bindgen]
pub struct WasmMetaphone {
    engine: Metaphone3,
}

#[wasm_bindgen]
impl WasmMetaphone {
    /// Create an encoder. Omitted arguments take their defaults; a
    /// `maxLength` of zero or below selects the default length.
    #[wasm_bindgen(constructor)]
    pub fn new(
        encode_vowels: Option<bool>,
        encode_exact: Option<bool>,
        max_length: Option<i32>,
    ) -> WasmMetaphone {
        let options = EncoderOptions::new()
            .with_encode_vowels(encode_vowels.unwrap_or(false))
            .with_encode_exact(encode_exact.unwrap_or(false))
            .with_signed_max_length(i64::from(max_length.unwrap_or(0)));
        WasmMetaphone {
            engine: Metaphone3::new(options),
        }
    }

    /// Encode a word.
    ///
    /// Returns an object with fields `primary` and `secondary`. The
    /// secondary code is empty when it equals the primary.
    pub fn encode(&mut self, word: &str) -> Result<JsValue, JsError> {
        let encoding = JsEncoding::from(self.engine.encode(word));
        serde_wasm_bindgen::to_value(&encoding).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Return the primary code of a word.
    pub fn primary(&mut self, word: &str) -> String {
        self.engine.encode(word).primary
    }

    /// Return the secondary code of a word, empty when it equals the primary.
    pub fn secondary(&mut self, word: &str) -> String {
        self.engine.encode(word).secondary
    }

    /// Check whether two words share a code.
    #[wasm_bindgen(js_name = "soundsLike")]
    pub fn sounds_like(&mut self, a: &str, b: &str) -> bool {
        let a = self.engine.encode(a);
        let b = self.engine.encode(b);
        a.sounds_like(&b)
    }

    /// Release resources. Calling this is optional.
    pub fn terminate(self) {
        // Drop self, releasing all resources.
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set one option by name, e.g. `setOption("encode_exact", "true")`.
    #[wasm_bindgen(js_name = "setOption")]
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), JsError> {
        self.engine.set_option(name, value).map_err(option_error_to_js)
    }

    /// Set whether non-initial vowels are encoded.
    #[wasm_bindgen(js_name = "setEncodeVowels")]
    pub fn set_encode_vowels(&mut self, value: bool) {
        let options = self.engine.options().with_encode_vowels(value);
        self.engine.set_options(options);
    }

    /// Set whether voiced and voiceless consonants are kept apart.
    #[wasm_bindgen(js_name = "setEncodeExact")]
    pub fn set_encode_exact(&mut self, value: bool) {
        let options = self.engine.options().with_encode_exact(value);
        self.engine.set_options(options);
    }

    /// Set the maximum code length; zero or below selects the default.
    #[wasm_bindgen(js_name = "setMaxLength")]
    pub fn set_max_length(&mut self, value: i32) {
        let options = self.engine.options().with_signed_max_length(i64::from(value));
        self.engine.set_options(options);
    }
}
