use async_trait::async_trait;
use mta_sts_application::ports::MxResolver;
use mta_sts_domain::{AnswerRecord, DnsAnswer, DomainError, MailDomain};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Resolver double answering from a per-domain table and recording every lookup.
pub struct MockMxResolver {
    answers: Arc<Mutex<HashMap<String, Result<DnsAnswer, DomainError>>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockMxResolver {
    pub fn new() -> Self {
        Self {
            answers: Arc::new(Mutex::new(HashMap::new())),
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_answer(&self, domain: &str, answer: DnsAnswer) {
        self.answers
            .lock()
            .unwrap()
            .insert(domain.to_string(), Ok(answer));
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.answers
            .lock()
            .unwrap()
            .insert(domain.to_string(), Err(error));
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl Default for MockMxResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MxResolver for MockMxResolver {
    async fn lookup_mx(&self, domain: &MailDomain) -> Result<DnsAnswer, DomainError> {
        self.lookups.lock().unwrap().push(domain.to_string());

        self.answers
            .lock()
            .unwrap()
            .get(domain.as_str())
            .cloned()
            .unwrap_or_else(|| {
                Ok(DnsAnswer {
                    status: 3,
                    answer: None,
                })
            })
    }
}

/// Successful answer holding one MX record per `data` string.
pub fn mx_answer(data: &[&str]) -> DnsAnswer {
    DnsAnswer {
        status: 0,
        answer: Some(data.iter().map(|d| AnswerRecord::new(15, *d)).collect()),
    }
}
