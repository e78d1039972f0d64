#[cfg(test)]
#[cfg(feature = "file-transport")]
mod test {
    use courrier::transport::Transport;
    use courrier::{Envelope, FileTransport};
    use std::env::temp_dir;
    use std::fs::{self, remove_file};

    #[test]
    fn file_transport() {
        let sender = FileTransport::new(temp_dir());
        let envelope = Envelope::new(
            "user@localhost".to_string(),
            vec!["root@localhost".to_string()],
        );
        let body = "Hello ß☺ example";

        let result = sender.send_raw("localhost:25", None, &envelope, body.as_bytes());
        assert!(result.is_ok());

        let message_id = result.unwrap();
        let file = temp_dir().join(format!("{}.eml", message_id));
        let contents = fs::read_to_string(&file).unwrap();
        remove_file(file).unwrap();

        assert_eq!(contents, body);
    }
}
