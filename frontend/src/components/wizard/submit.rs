//! Submit orchestration: parallel upload fan-out with a barrier join, then a
//! single persist call.
//!
//! The functions here are generic over the file payload and the gateway
//! functions so the sequencing contract can be exercised without a browser:
//! `update.rs` instantiates them with the real `api` gateways and
//! `web_sys::File` handles.

use std::future::Future;

use super::state::AssetSlot;

/// The remote URLs of the uploaded assets, keyed by slot identity. Built from
/// tagged results, never from resolution order.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAssets {
    pub front: String,
    pub back: String,
    pub signature: Option<String>,
}

/// Uploads every pending asset concurrently and joins on all of them.
///
/// Each upload future is tagged with its slot before the join, so URLs land
/// in the right field even when the transport resolves out of order. If any
/// upload fails the whole operation fails and no URL set is produced.
pub async fn upload_all<T, F, Fut>(
    pending: Vec<(AssetSlot, T)>,
    upload: F,
) -> Result<UploadedAssets, String>
where
    F: Fn(AssetSlot, T) -> Fut,
    Fut: Future<Output = Result<String, String>>,
{
    let tagged = pending.into_iter().map(|(slot, payload)| {
        let fut = upload(slot, payload);
        async move { (slot, fut.await) }
    });
    let results = futures::future::join_all(tagged).await;

    let mut front = None;
    let mut back = None;
    let mut signature = None;
    for (slot, result) in results {
        let url = result?;
        match slot {
            AssetSlot::Front => front = Some(url),
            AssetSlot::Back => back = Some(url),
            AssetSlot::Signature => signature = Some(url),
        }
    }

    Ok(UploadedAssets {
        front: front.ok_or_else(|| "Thiếu ảnh mặt trước CCCD.".to_string())?,
        back: back.ok_or_else(|| "Thiếu ảnh mặt sau CCCD.".to_string())?,
        signature,
    })
}

/// The full submit transaction: fan-out uploads, barrier join, then exactly
/// one persist call. The persist gateway runs only after every upload has
/// resolved successfully.
pub async fn perform_submit<T, F, Fut, P, PFut>(
    pending: Vec<(AssetSlot, T)>,
    upload: F,
    persist: P,
) -> Result<(), String>
where
    F: Fn(AssetSlot, T) -> Fut,
    Fut: Future<Output = Result<String, String>>,
    P: FnOnce(UploadedAssets) -> PFut,
    PFut: Future<Output = Result<(), String>>,
{
    let assets = upload_all(pending, upload).await?;
    persist(assets).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn three_slots() -> Vec<(AssetSlot, &'static str)> {
        vec![
            (AssetSlot::Front, "front-bytes"),
            (AssetSlot::Back, "back-bytes"),
            (AssetSlot::Signature, "signature-bytes"),
        ]
    }

    #[test]
    fn urls_are_keyed_by_slot_identity() {
        let assets = block_on(upload_all(three_slots(), |slot, _payload| async move {
            Ok(format!("https://cdn.example/{}", slot.logical_suffix()))
        }))
        .unwrap();

        assert_eq!(assets.front, "https://cdn.example/cccd1");
        assert_eq!(assets.back, "https://cdn.example/cccd2");
        assert_eq!(assets.signature.as_deref(), Some("https://cdn.example/signature"));
    }

    #[test]
    fn two_asset_variant_has_no_signature_url() {
        let pending = vec![(AssetSlot::Front, "f"), (AssetSlot::Back, "b")];
        let assets = block_on(upload_all(pending, |slot, _| async move {
            Ok(slot.logical_suffix().to_string())
        }))
        .unwrap();
        assert_eq!(assets.signature, None);
    }

    #[test]
    fn one_upload_is_issued_per_slot_and_persist_runs_once_after_them() {
        let uploads: Rc<RefCell<Vec<AssetSlot>>> = Rc::new(RefCell::new(Vec::new()));
        let persists = Rc::new(RefCell::new(0u32));

        let uploads_seen = uploads.clone();
        let persist_count = persists.clone();
        let result = block_on(perform_submit(
            three_slots(),
            move |slot, _payload| {
                uploads_seen.borrow_mut().push(slot);
                async move { Ok(slot.logical_suffix().to_string()) }
            },
            move |assets| {
                assert_eq!(assets.front, "cccd1");
                assert_eq!(assets.back, "cccd2");
                *persist_count.borrow_mut() += 1;
                async move { Ok(()) }
            },
        ));

        assert!(result.is_ok());
        assert_eq!(uploads.borrow().len(), 3);
        assert_eq!(*persists.borrow(), 1);
    }

    #[test]
    fn failed_upload_aborts_before_persist() {
        let persists = Rc::new(RefCell::new(0u32));
        let persist_count = persists.clone();

        let result = block_on(perform_submit(
            three_slots(),
            |slot, _payload| async move {
                if slot == AssetSlot::Back {
                    Err("Lỗi upload.".to_string())
                } else {
                    Ok(slot.logical_suffix().to_string())
                }
            },
            move |_assets| {
                *persist_count.borrow_mut() += 1;
                async move { Ok(()) }
            },
        ));

        assert_eq!(result, Err("Lỗi upload.".to_string()));
        assert_eq!(*persists.borrow(), 0);
    }

    #[test]
    fn persist_failure_propagates_after_successful_uploads() {
        let result = block_on(perform_submit(
            three_slots(),
            |slot, _payload| async move { Ok(slot.logical_suffix().to_string()) },
            |_assets| async move { Err("Lỗi cập nhật hồ sơ.".to_string()) },
        ));
        assert_eq!(result, Err("Lỗi cập nhật hồ sơ.".to_string()));
    }
}
