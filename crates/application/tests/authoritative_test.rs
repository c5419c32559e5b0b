mod helpers;

use helpers::zone;
use ironzone_application::use_cases::AuthoritativeResolver;
use ironzone_domain::{DnsQuery, RecordType, ResponseCode};
use std::sync::Arc;

use RecordType::{A, CNAME, MX, NS, TXT};

fn resolver(records: &[(&str, RecordType, &str)]) -> AuthoritativeResolver {
    AuthoritativeResolver::new(Arc::new(zone("example.com", records)))
}

fn kinds_and_data(records: &[ironzone_domain::DnsRecord]) -> Vec<(RecordType, String)> {
    records
        .iter()
        .map(|r| (r.record_type, r.data.clone()))
        .collect()
}

#[test]
fn test_direct_a_records_in_order() {
    let resolver = resolver(&[
        ("www.example.com", A, "192.0.2.1"),
        ("www.example.com", TXT, "hello"),
        ("www.example.com", A, "192.0.2.2"),
    ]);

    let response = resolver.answer(&DnsQuery::new("www.example.com", A));

    assert_eq!(response.rcode, ResponseCode::NoError);
    assert!(response.authoritative);
    assert_eq!(
        kinds_and_data(&response.answers),
        vec![(A, "192.0.2.1".to_string()), (A, "192.0.2.2".to_string())]
    );
}

#[test]
fn test_txt_query_returns_only_txt() {
    let resolver = resolver(&[
        ("www.example.com", A, "192.0.2.1"),
        ("www.example.com", TXT, "v=spf1 -all"),
    ]);

    let response = resolver.answer(&DnsQuery::new("www.example.com", TXT));

    assert_eq!(kinds_and_data(&response.answers), vec![(TXT, "v=spf1 -all".to_string())]);
}

#[test]
fn test_cname_chain_is_flattened() {
    let resolver = resolver(&[
        ("www.example.com", CNAME, "host.example.com"),
        ("host.example.com", A, "1.2.3.4"),
    ]);

    let response = resolver.answer(&DnsQuery::new("www.example.com", A));

    assert_eq!(response.rcode, ResponseCode::NoError);
    assert_eq!(
        kinds_and_data(&response.answers),
        vec![
            (CNAME, "host.example.com".to_string()),
            (A, "1.2.3.4".to_string())
        ]
    );
    assert_eq!(&*response.answers[1].name, "host.example.com");
}

#[test]
fn test_multi_step_cname_chain() {
    let resolver = resolver(&[
        ("a.example.com", CNAME, "b.example.com"),
        ("b.example.com", CNAME, "c.example.com"),
        ("c.example.com", A, "192.0.2.3"),
    ]);

    let response = resolver.answer(&DnsQuery::new("a.example.com", A));

    let kinds: Vec<_> = response.answers.iter().map(|r| r.record_type).collect();
    assert_eq!(kinds, vec![CNAME, CNAME, A]);
}

#[test]
fn test_cname_query_does_not_chase_target() {
    let resolver = resolver(&[
        ("www.example.com", CNAME, "host.example.com"),
        ("host.example.com", A, "1.2.3.4"),
    ]);

    let response = resolver.answer(&DnsQuery::new("www.example.com", CNAME));

    assert_eq!(kinds_and_data(&response.answers), vec![(CNAME, "host.example.com".to_string())]);
}

#[test]
fn test_cname_to_name_outside_zone_yields_only_cname() {
    let resolver = resolver(&[("www.example.com", CNAME, "cdn.other.net")]);

    let response = resolver.answer(&DnsQuery::new("www.example.com", A));

    assert_eq!(response.rcode, ResponseCode::NoError);
    assert_eq!(response.answers.len(), 1);
}

#[test]
fn test_cname_cycle_is_servfail() {
    let resolver = resolver(&[
        ("a.example.com", CNAME, "b.example.com"),
        ("b.example.com", CNAME, "a.example.com"),
    ]);

    let response = resolver.answer(&DnsQuery::new("a.example.com", A));

    assert_eq!(response.rcode, ResponseCode::ServFail);
    assert!(response.answers.is_empty());
}

#[test]
fn test_self_referencing_cname_is_servfail() {
    let resolver = resolver(&[("loop.example.com", CNAME, "loop.example.com")]);

    let response = resolver.answer(&DnsQuery::new("loop.example.com", A));

    assert_eq!(response.rcode, ResponseCode::ServFail);
}

#[test]
fn test_shared_target_is_not_a_cycle() {
    // Two MX records pointing at the same host visit it twice, but never
    // while it is still on the current path.
    let resolver = resolver(&[
        ("example.com", MX, "10 mail.example.com"),
        ("example.com", MX, "20 mail.example.com"),
        ("mail.example.com", A, "192.0.2.25"),
    ]);

    let response = resolver.answer(&DnsQuery::new("example.com", MX));

    assert_eq!(response.rcode, ResponseCode::NoError);
    let kinds: Vec<_> = response.answers.iter().map(|r| r.record_type).collect();
    assert_eq!(kinds, vec![MX, A, MX, A]);
}

#[test]
fn test_mx_target_addresses_are_spliced() {
    let resolver = resolver(&[
        ("example.com", MX, "10 mail.example.com"),
        ("mail.example.com", A, "192.0.2.25"),
    ]);

    let response = resolver.answer(&DnsQuery::new("example.com", MX));

    assert_eq!(
        kinds_and_data(&response.answers),
        vec![
            (MX, "10 mail.example.com".to_string()),
            (A, "192.0.2.25".to_string())
        ]
    );
}

#[test]
fn test_mx_pointing_at_origin_is_not_a_cycle() {
    let resolver = resolver(&[
        ("example.com", MX, "10 example.com"),
        ("example.com", A, "192.0.2.1"),
    ]);

    let response = resolver.answer(&DnsQuery::new("example.com", MX));

    assert_eq!(response.rcode, ResponseCode::NoError);
    assert_eq!(
        kinds_and_data(&response.answers),
        vec![
            (MX, "10 example.com".to_string()),
            (A, "192.0.2.1".to_string())
        ]
    );
}

#[test]
fn test_mx_not_emitted_for_a_query() {
    let resolver = resolver(&[
        ("example.com", MX, "10 mail.example.com"),
        ("example.com", A, "192.0.2.1"),
        ("mail.example.com", A, "192.0.2.25"),
    ]);

    let response = resolver.answer(&DnsQuery::new("example.com", A));

    assert_eq!(kinds_and_data(&response.answers), vec![(A, "192.0.2.1".to_string())]);
}

#[test]
fn test_delegation_glue_is_attached() {
    let resolver = resolver(&[
        ("example.com", NS, "ns1.example.com"),
        ("ns1.example.com", A, "192.0.2.53"),
        ("www.example.com", A, "192.0.2.80"),
    ]);

    let response = resolver.answer(&DnsQuery::new("www.example.com", A));

    assert_eq!(response.authority.len(), 1);
    assert_eq!(response.authority[0].record_type, NS);
    assert_eq!(response.authority[0].data, "ns1.example.com");
    assert_eq!(response.additional.len(), 1);
    assert_eq!(&*response.additional[0].name, "ns1.example.com");
    assert_eq!(response.additional[0].data, "192.0.2.53");
}

#[test]
fn test_glue_skipped_for_name_server_outside_zone() {
    let resolver = resolver(&[
        ("example.com", NS, "ns1.example.com"),
        ("example.com", NS, "ns.provider.net"),
        ("ns1.example.com", A, "192.0.2.53"),
    ]);

    let response = resolver.answer(&DnsQuery::new("example.com", NS));

    assert_eq!(response.answers.len(), 2);
    assert_eq!(response.authority.len(), 2);
    assert_eq!(response.additional.len(), 1);
}

#[test]
fn test_unhosted_name_is_nxdomain() {
    let resolver = resolver(&[("www.example.com", A, "192.0.2.1")]);

    let response = resolver.answer(&DnsQuery::new("missing.example.com", A));

    assert_eq!(response.rcode, ResponseCode::NxDomain);
    assert!(!resolver.is_hosted("missing.example.com"));
}

#[test]
fn test_hosted_name_without_matching_type_is_empty_noerror() {
    let resolver = resolver(&[("www.example.com", A, "192.0.2.1")]);

    let response = resolver.answer(&DnsQuery::new("www.example.com", MX));

    assert_eq!(response.rcode, ResponseCode::NoError);
    assert!(response.answers.is_empty());
}
