#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use dpp_rust_sdk::{
        Cid, DocumentStager, DppError, LocalProductDescriptor, PinningError, PinningGateway,
        StagingOptions,
    };
    use pinning::StatusCode;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tempfile::TempDir;

    /// Gateway double: answers from a fixed table and records every call.
    #[derive(Default)]
    struct RecordingGateway {
        metadata_cid: Option<Cid>,
        files: HashMap<String, Result<Cid, String>>,
        delays: HashMap<String, Duration>,
        json_payloads: Mutex<Vec<Value>>,
        events: Mutex<Vec<String>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl RecordingGateway {
        fn new(metadata_cid: &str) -> Self {
            Self {
                metadata_cid: Some(metadata_cid.to_string()),
                ..Default::default()
            }
        }

        fn pinning(mut self, path: &str, cid: &str) -> Self {
            self.files.insert(path.to_string(), Ok(cid.to_string()));
            self
        }

        fn failing(mut self, path: &str, message: &str) -> Self {
            self.files.insert(path.to_string(), Err(message.to_string()));
            self
        }

        fn delayed(mut self, path: &str, millis: u64) -> Self {
            self.delays
                .insert(path.to_string(), Duration::from_millis(millis));
            self
        }

        fn json_calls(&self) -> usize {
            self.json_payloads.lock().unwrap().len()
        }

        fn file_calls(&self) -> Vec<String> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter_map(|event| event.strip_prefix("start ").map(str::to_string))
                .collect()
        }
    }

    fn service_error(message: &str) -> PinningError {
        PinningError::HttpError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: message.to_string(),
        }
    }

    #[async_trait]
    impl PinningGateway for RecordingGateway {
        async fn pin_json(&self, data: &Value) -> Result<Cid, PinningError> {
            self.json_payloads.lock().unwrap().push(data.clone());
            self.metadata_cid
                .clone()
                .ok_or_else(|| service_error("Failed to upload JSON"))
        }

        async fn pin_file(&self, path: &Path) -> Result<Cid, PinningError> {
            let key = path.to_string_lossy().into_owned();
            self.events.lock().unwrap().push(format!("start {key}"));

            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            if let Some(delay) = self.delays.get(&key) {
                tokio::time::sleep(*delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            self.events.lock().unwrap().push(format!("finish {key}"));
            match self.files.get(&key) {
                Some(Ok(cid)) => Ok(cid.clone()),
                Some(Err(message)) => Err(service_error(message)),
                None => Err(service_error("unknown file")),
            }
        }
    }

    fn write_metadata(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("meta.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn descriptor(metadata: &Path, manuals: &[&str], specifications: &[&str]) -> LocalProductDescriptor {
        LocalProductDescriptor {
            product_id: "12345".to_string(),
            description: "Example Product".to_string(),
            manual_paths: manuals.iter().map(|path| path.to_string()).collect(),
            specification_paths: specifications.iter().map(|path| path.to_string()).collect(),
            metadata_file_path: metadata.to_string_lossy().into_owned(),
        }
    }

    #[tokio::test]
    async fn resolves_every_document_in_order() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let metadata = write_metadata(&dir, "{}");

        let gateway = Arc::new(
            RecordingGateway::new("QmMeta")
                .pinning("m1.pdf", "QmM1")
                .pinning("m2.pdf", "QmM2")
                .pinning("s1.pdf", "QmS1"),
        );
        let stager = DocumentStager::new(gateway.clone());

        let resolved = stager
            .stage(descriptor(&metadata, &["m1.pdf", "m2.pdf"], &["s1.pdf"]))
            .await
            .unwrap();

        assert_eq!(resolved.product_id(), "12345");
        assert_eq!(resolved.description(), "Example Product");
        assert_eq!(resolved.manual_cids(), ["QmM1", "QmM2"]);
        assert_eq!(resolved.specification_cids(), ["QmS1"]);
        assert_eq!(resolved.metadata_cid(), "QmMeta");

        assert_eq!(gateway.json_calls(), 1);
        assert_eq!(gateway.json_payloads.lock().unwrap()[0], serde_json::json!({}));
        assert_eq!(gateway.file_calls().len(), 3);
    }

    #[tokio::test]
    async fn passes_metadata_through_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = write_metadata(&dir, r#"{"key":"value","nested":{"list":[1,2,3]}}"#);

        let gateway = Arc::new(RecordingGateway::new("QmMeta"));
        DocumentStager::new(gateway.clone())
            .stage(descriptor(&metadata, &[], &[]))
            .await
            .unwrap();

        assert_eq!(
            gateway.json_payloads.lock().unwrap()[0],
            serde_json::json!({ "key": "value", "nested": { "list": [1, 2, 3] } })
        );
    }

    #[tokio::test]
    async fn empty_document_lists_stage_without_file_uploads() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = write_metadata(&dir, "{}");

        let gateway = Arc::new(RecordingGateway::new("QmMeta"));
        let resolved = DocumentStager::new(gateway.clone())
            .stage(descriptor(&metadata, &[], &[]))
            .await
            .unwrap();

        assert!(resolved.manual_cids().is_empty());
        assert!(resolved.specification_cids().is_empty());
        assert_eq!(resolved.metadata_cid(), "QmMeta");
        assert_eq!(gateway.json_calls(), 1);
        assert!(gateway.file_calls().is_empty());
    }

    #[tokio::test]
    async fn malformed_metadata_fails_before_any_upload() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = write_metadata(&dir, "{ \"key\": ");

        let gateway = Arc::new(RecordingGateway::new("QmMeta").pinning("m1.pdf", "QmM1"));
        let error = DocumentStager::new(gateway.clone())
            .stage(descriptor(&metadata, &["m1.pdf"], &[]))
            .await
            .unwrap_err();

        assert!(matches!(error, DppError::ConfigReadError { .. }));
        assert_eq!(gateway.json_calls(), 0);
        assert!(gateway.file_calls().is_empty());
    }

    #[tokio::test]
    async fn missing_metadata_file_fails_before_any_upload() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");

        let gateway = Arc::new(RecordingGateway::new("QmMeta"));
        let error = DocumentStager::new(gateway.clone())
            .stage(descriptor(&missing, &[], &[]))
            .await
            .unwrap_err();

        match error {
            DppError::ConfigReadError { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(gateway.json_calls(), 0);
    }

    #[tokio::test]
    async fn metadata_upload_failure_skips_file_uploads() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = write_metadata(&dir, "{}");

        let gateway = Arc::new(RecordingGateway {
            metadata_cid: None,
            ..RecordingGateway::default()
        });
        let error = DocumentStager::new(gateway.clone())
            .stage(descriptor(&metadata, &["m1.pdf"], &["s1.pdf"]))
            .await
            .unwrap_err();

        assert!(matches!(error, DppError::MetadataUploadError(_)));
        assert_eq!(
            error.to_string(),
            "Error uploading JSON to Pinata: Error response (500 Internal Server Error): Failed to upload JSON"
        );
        assert!(gateway.file_calls().is_empty());
    }

    #[tokio::test]
    async fn one_failed_manual_fails_stage_but_all_uploads_run() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = write_metadata(&dir, "{}");

        let gateway = Arc::new(
            RecordingGateway::new("QmMeta")
                .pinning("m1.pdf", "QmM1")
                .failing("m2.pdf", "Failed to upload file")
                .pinning("m3.pdf", "QmM3")
                .pinning("s1.pdf", "QmS1"),
        );
        let error = DocumentStager::new(gateway.clone())
            .stage(descriptor(&metadata, &["m1.pdf", "m2.pdf", "m3.pdf"], &["s1.pdf"]))
            .await
            .unwrap_err();

        match &error {
            DppError::DocumentUploadError {
                path,
                source,
                additional_failures,
            } => {
                assert_eq!(path, "m2.pdf");
                assert!(source.to_string().ends_with("Failed to upload file"));
                assert!(additional_failures.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(error.to_string().contains("Failed to upload file"));

        let mut calls = gateway.file_calls();
        calls.sort();
        assert_eq!(calls, ["m1.pdf", "m2.pdf", "m3.pdf", "s1.pdf"]);
    }

    #[tokio::test]
    async fn first_failure_is_reported_and_later_ones_kept() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = write_metadata(&dir, "{}");

        // m2 finishes last but is still the first failure in input order.
        let gateway = Arc::new(
            RecordingGateway::new("QmMeta")
                .pinning("m1.pdf", "QmM1")
                .failing("m2.pdf", "quota exceeded")
                .delayed("m2.pdf", 50)
                .failing("m3.pdf", "timeout")
                .failing("s1.pdf", "file too large"),
        );
        let error = DocumentStager::new(gateway)
            .stage(descriptor(&metadata, &["m1.pdf", "m2.pdf", "m3.pdf"], &["s1.pdf"]))
            .await
            .unwrap_err();

        match error {
            DppError::DocumentUploadError {
                path,
                source,
                additional_failures,
            } => {
                assert_eq!(path, "m2.pdf");
                assert!(source.to_string().ends_with("quota exceeded"));
                let later: Vec<_> = additional_failures
                    .iter()
                    .map(|failure| failure.path.as_str())
                    .collect();
                assert_eq!(later, ["m3.pdf", "s1.pdf"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn concurrent_uploads_keep_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = write_metadata(&dir, "{}");

        let gateway = Arc::new(
            RecordingGateway::new("QmMeta")
                .pinning("m1.pdf", "QmM1")
                .delayed("m1.pdf", 60)
                .pinning("m2.pdf", "QmM2")
                .delayed("m2.pdf", 30)
                .pinning("m3.pdf", "QmM3")
                .pinning("s1.pdf", "QmS1")
                .delayed("s1.pdf", 20)
                .pinning("s2.pdf", "QmS2"),
        );
        let stager = DocumentStager::with_options(
            gateway.clone(),
            StagingOptions {
                max_concurrent_uploads: 3,
            },
        );

        let resolved = stager
            .stage(descriptor(
                &metadata,
                &["m1.pdf", "m2.pdf", "m3.pdf"],
                &["s1.pdf", "s2.pdf"],
            ))
            .await
            .unwrap();

        assert_eq!(resolved.manual_cids(), ["QmM1", "QmM2", "QmM3"]);
        assert_eq!(resolved.specification_cids(), ["QmS1", "QmS2"]);

        // Specifications only start once every manual has finished.
        let events = gateway.events.lock().unwrap().clone();
        let last_manual = events
            .iter()
            .rposition(|event| event.starts_with("finish m"))
            .unwrap();
        let first_specification = events
            .iter()
            .position(|event| event.starts_with("start s"))
            .unwrap();
        assert!(last_manual < first_specification);
    }

    #[tokio::test]
    async fn respects_upload_concurrency_limit() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = write_metadata(&dir, "{}");

        let mut gateway = RecordingGateway::new("QmMeta");
        let manuals: Vec<String> = (0..6).map(|index| format!("m{index}.pdf")).collect();
        for manual in &manuals {
            gateway = gateway
                .pinning(manual, &format!("Qm{manual}"))
                .delayed(manual, 20);
        }
        let gateway = Arc::new(gateway);

        let manual_refs: Vec<&str> = manuals.iter().map(String::as_str).collect();
        let resolved = DocumentStager::with_options(
            gateway.clone(),
            StagingOptions {
                max_concurrent_uploads: 2,
            },
        )
        .stage(descriptor(&metadata, &manual_refs, &[]))
        .await
        .unwrap();

        assert_eq!(resolved.manual_cids().len(), 6);
        assert_eq!(resolved.manual_cids()[5], "Qmm5.pdf");
        assert_eq!(gateway.max_in_flight.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn stage_file_reads_descriptor_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = write_metadata(&dir, r#"{"key":"value"}"#);
        let descriptor_path = dir.path().join("product-details.json");
        std::fs::write(
            &descriptor_path,
            serde_json::json!({
                "productId": 12345,
                "description": "Example Product",
                "manuals": ["m1.pdf"],
                "specifications": [],
                "jsonConfigPath": metadata,
            })
            .to_string(),
        )
        .unwrap();

        let gateway = Arc::new(RecordingGateway::new("QmJsonHash").pinning("m1.pdf", "QmManual1"));
        let resolved = DocumentStager::new(gateway)
            .stage_file(&descriptor_path)
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&resolved).unwrap(),
            serde_json::json!({
                "productId": "12345",
                "description": "Example Product",
                "manualCids": ["QmManual1"],
                "specificationCids": [],
                "metadataCid": "QmJsonHash"
            })
        );
    }

    #[tokio::test]
    async fn stage_file_reports_unreadable_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = Arc::new(RecordingGateway::new("QmMeta"));

        let error = DocumentStager::new(gateway.clone())
            .stage_file(dir.path().join("product-details.json"))
            .await
            .unwrap_err();

        assert!(matches!(error, DppError::ConfigReadError { .. }));
        assert_eq!(gateway.json_calls(), 0);
    }
}
