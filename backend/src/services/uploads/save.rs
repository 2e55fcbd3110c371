use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder};
use common::requests::UploadResponse;
use futures_util::StreamExt;
use log::info;
use regex::Regex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::db;

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: `200 OK` with the `UploadResponse` JSON body.
/// - On failure: `400 Bad Request` with the error message.
pub async fn process(payload: Multipart) -> impl Responder {
    match store_asset(payload).await {
        Ok(url) => HttpResponse::Ok().json(UploadResponse { url }),
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}

/// Checks the logical name an asset is stored under. The wizard builds it as
/// `{staff_id}_{slot}`, so only word characters and hyphens are expected.
fn validate_logical_name(name: &str, name_re: &Regex) -> Result<(), String> {
    if name.is_empty() {
        return Err("The asset name must not be empty".to_string());
    }
    if !name_re.is_match(name) {
        return Err("The asset name may contain only letters, digits, '-' and '_'".to_string());
    }
    Ok(())
}

/// Extracts and checks the extension of the uploaded file.
fn image_extension(filename: &str) -> Result<String, String> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" | "png" | "webp" => Ok(extension),
        _ => Err("The file must be a jpg, jpeg, png or webp image".to_string()),
    }
}

/// Streams one uploaded asset to disk and returns its public URL.
///
/// The `name` part must arrive before the `file` part, mirroring how the
/// frontend builds the form. The file is written chunk by chunk through a
/// `BufWriter`; nothing is buffered whole in memory.
pub async fn store_asset(mut payload: Multipart) -> Result<String, String> {
    let name_re = Regex::new(r"^[A-Za-z0-9_-]+$").map_err(|e| format!("Regex error: {}", e))?;

    let mut logical_name: Option<String> = None;
    let mut stored_url: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| e.to_string())?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match field_name.as_deref() {
            Some("name") => {
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    bytes.extend_from_slice(&chunk.map_err(|e| e.to_string())?);
                }
                let name = String::from_utf8(bytes)
                    .map_err(|_| "The asset name is not valid UTF-8".to_string())?;
                validate_logical_name(&name, &name_re)?;
                logical_name = Some(name);
            }

            Some("file") => {
                let name = logical_name
                    .as_ref()
                    .ok_or("The asset name must be sent before the file")?;

                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                    .unwrap_or_default();
                let extension = image_extension(&filename)?;

                let target = format!("{}/{}.{}", db::UPLOAD_DIR, name, extension);
                let file = File::create(&target).map_err(|e| e.to_string())?;
                let mut writer = BufWriter::new(file);
                while let Some(chunk) = field.next().await {
                    let chunk = chunk.map_err(|e| e.to_string())?;
                    writer.write_all(&chunk).map_err(|e| e.to_string())?;
                }
                writer.flush().map_err(|e| e.to_string())?;

                info!("stored asset {} -> {}", name, target);
                stored_url = Some(format!("/files/{}.{}", name, extension));
            }

            _ => {}
        }
    }

    if logical_name.is_none() {
        return Err("Missing asset name".to_string());
    }
    stored_url.ok_or("Missing file".to_string())
}

#[cfg(test)]
mod tests {
    use super::{image_extension, validate_logical_name};
    use regex::Regex;

    #[test]
    fn logical_names_follow_the_staff_slot_pattern() {
        let re = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
        assert!(validate_logical_name("E1024_cccd1", &re).is_ok());
        assert!(validate_logical_name("E1024_signature", &re).is_ok());
        assert!(validate_logical_name("", &re).is_err());
        assert!(validate_logical_name("../etc/passwd", &re).is_err());
        assert!(validate_logical_name("a b", &re).is_err());
    }

    #[test]
    fn only_image_extensions_are_accepted() {
        assert_eq!(image_extension("front.JPG").unwrap(), "jpg");
        assert_eq!(image_extension("back.png").unwrap(), "png");
        assert!(image_extension("notes.pdf").is_err());
        assert!(image_extension("noextension").is_err());
    }
}
