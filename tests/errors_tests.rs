use linkpress::errors::{LinkpressError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let error = LinkpressError::config("缺少必需字段");

        assert!(matches!(error, LinkpressError::Config(_)));
        assert!(error.to_string().contains("Configuration Error"));
        assert!(error.to_string().contains("缺少必需字段"));
    }

    #[test]
    fn test_file_operation_error() {
        let error = LinkpressError::file_operation("文件读取失败");

        assert!(matches!(error, LinkpressError::FileOperation(_)));
        assert!(error.to_string().contains("File Operation Error"));
        assert!(error.to_string().contains("文件读取失败"));
    }

    #[test]
    fn test_serialization_error() {
        let error = LinkpressError::serialization("序列化失败");

        assert!(matches!(error, LinkpressError::Serialization(_)));
        assert!(error.to_string().contains("Serialization Error"));
        assert!(error.to_string().contains("序列化失败"));
    }

    #[test]
    fn test_internal_error() {
        let error = LinkpressError::internal("id generation exhausted");

        assert!(matches!(error, LinkpressError::Internal(_)));
        assert!(error.to_string().contains("Internal Error"));
        assert!(error.to_string().contains("id generation exhausted"));
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(LinkpressError::config("x").code(), "E001");
        assert_eq!(LinkpressError::file_operation("x").code(), "E002");
        assert_eq!(LinkpressError::serialization("x").code(), "E003");
        assert_eq!(LinkpressError::internal("x").code(), "E004");
    }

    #[test]
    fn test_format_simple() {
        let error = LinkpressError::file_operation("disk full");
        assert_eq!(error.format_simple(), "File Operation Error: disk full");
    }

    #[test]
    fn test_format_colored_contains_code_and_message() {
        let error = LinkpressError::config("bad port");
        let formatted = error.format_colored();

        // ANSI 转义不影响子串匹配
        assert!(formatted.contains("E001"));
        assert!(formatted.contains("bad port"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "文件未找到");
        let linkpress_error: LinkpressError = io_error.into();

        assert!(matches!(linkpress_error, LinkpressError::FileOperation(_)));
        assert!(linkpress_error.to_string().contains("File Operation Error"));
        assert!(linkpress_error.to_string().contains("文件未找到"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        // 创建一个无效的 JSON 来触发错误
        let invalid_json = "{invalid json";
        let json_error = serde_json::from_str::<serde_json::Value>(invalid_json).unwrap_err();
        let linkpress_error: LinkpressError = json_error.into();

        assert!(matches!(linkpress_error, LinkpressError::Serialization(_)));
        assert!(linkpress_error.to_string().contains("Serialization Error"));
    }

    #[test]
    fn test_config_error_conversion() {
        let config_error = config::Config::default()
            .get::<String>("no_such_key")
            .unwrap_err();
        let linkpress_error: LinkpressError = config_error.into();

        assert!(matches!(linkpress_error, LinkpressError::Config(_)));
        assert!(linkpress_error.to_string().contains("Configuration Error"));
    }
}

#[cfg(test)]
mod error_trait_tests {
    use super::*;

    #[test]
    fn test_error_trait_implementation() {
        let error = LinkpressError::internal("测试错误");

        let error_trait: &dyn Error = &error;
        assert!(!error_trait.to_string().is_empty());

        // source 应该返回 None，因为我们的错误是顶级错误
        assert!(error_trait.source().is_none());
    }

    #[test]
    fn test_debug_implementation() {
        let error = LinkpressError::file_operation("调试测试");
        let debug_string = format!("{:?}", error);

        assert!(debug_string.contains("FileOperation"));
        assert!(debug_string.contains("调试测试"));
    }

    #[test]
    fn test_clone_implementation() {
        let original = LinkpressError::serialization("克隆测试");
        let cloned = original.clone();

        assert_eq!(original.to_string(), cloned.to_string());
        assert!(matches!(cloned, LinkpressError::Serialization(_)));
    }

    #[test]
    fn test_send_sync_traits() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<LinkpressError>();
        assert_sync::<LinkpressError>();
    }
}

#[cfg(test)]
mod result_type_tests {
    use super::*;

    #[test]
    fn test_result_ok() {
        let result: Result<String> = Ok("成功".to_string());
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "成功");
    }

    #[test]
    fn test_result_err() {
        let result: Result<String> = Err(LinkpressError::internal("失败"));
        assert!(result.is_err());

        let error = result.unwrap_err();
        assert!(matches!(error, LinkpressError::Internal(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn read_json(input: &str) -> Result<serde_json::Value> {
            let value = serde_json::from_str(input)?;
            Ok(value)
        }

        assert!(read_json(r#"{"ok": true}"#).is_ok());
        assert!(matches!(
            read_json("{broken"),
            Err(LinkpressError::Serialization(_))
        ));
    }
}
