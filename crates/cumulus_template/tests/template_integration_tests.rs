//! Integration tests for the template data model.

use cumulus_template::{
    CompositeResource, OutputFormat, PropertyTree, Resource, Template,
};
use serde_json::json;

fn ec2_instance_resource() -> Resource {
    let mut properties = PropertyTree::new();
    properties.set("image_id", "ami-0ff8a91507f77f867");
    properties.set("instance_type", "t2.micro");
    properties.set("key_name", "test_key");

    Resource::new("AWS::EC2::Instance", "MyEC2Instance")
        .unwrap()
        .with_properties(properties)
}

fn s3_bucket_resource() -> Resource {
    let mut properties = PropertyTree::new();
    properties.set("access_control", "AuthenticatedRead");
    properties
        .child("accelerate_configuration")
        .set("acceleration_status", "Enabled");

    Resource::new("AWS::S3::Bucket", "bucket.example.com")
        .unwrap()
        .with_properties(properties)
        .with_export(true)
}

fn ec2_vpc_resource() -> Resource {
    let mut properties = PropertyTree::new();
    properties.set("cidr_block", "10.0.0.0/16");
    properties.set("enable_dns_support", false);
    properties.set("enable_dns_hostnames", true);

    Resource::new("AWS::EC2::VPC", "vpc")
        .unwrap()
        .with_properties(properties)
}

fn ec2_internet_gateway_resource() -> Resource {
    Resource::new("AWS::EC2::InternetGateway", "gateway").unwrap()
}

fn full_template() -> Template {
    let vpc = ec2_vpc_resource();
    let gateway = ec2_internet_gateway_resource();

    let mut attachment =
        Resource::new("AWS::EC2::VPCGatewayAttachment", "attachment").unwrap();
    attachment
        .properties_mut()
        .set("internet_gateway_id", gateway.reference());
    attachment.properties_mut().set("vpc_id", vpc.reference());

    let mut eip = Resource::new("AWS::EC2::EIP", "eip").unwrap();
    eip.properties_mut().set("domain", "vpc");
    eip.depends_on(&gateway);

    let mut template = Template::new().with_description("A empty template");
    template.add(vpc);
    template.add(gateway);
    template.add(attachment);
    template.add(eip);
    template.add(ec2_instance_resource());
    template.add(s3_bucket_resource());
    template
}

#[test]
fn empty_template_document() {
    let template = Template::new().with_description("A empty template");

    assert_eq!(
        template.to_document(),
        json!({
            "AWSTemplateFormatVersion": "2010-09-09",
            "Description": "A empty template",
            "Resources": {},
            "Outputs": {}
        })
    );
}

#[test]
fn ec2_instance_scenario() {
    let mut template = Template::new().with_description("A empty template");
    template.add(ec2_instance_resource());

    let document = template.to_document();
    assert_eq!(
        document.pointer("/Resources/MyEC2Instance"),
        Some(&json!({
            "Properties": {
                "ImageId": "ami-0ff8a91507f77f867",
                "InstanceType": "t2.micro",
                "KeyName": "test_key"
            },
            "Type": "AWS::EC2::Instance"
        }))
    );
    assert_eq!(document.pointer("/Outputs"), Some(&json!({})));
}

#[test]
fn exported_bucket_scenario() {
    let mut template = Template::new();
    template.add(s3_bucket_resource());

    let document = template.to_document();
    assert_eq!(
        document.pointer("/Outputs/bucket.example.com"),
        Some(&json!({
            "Value": { "Ref": "bucket.example.com" },
            "Export": { "Name": "bucket.example.com" }
        }))
    );
}

#[test]
fn dependency_scenario() {
    let gateway = ec2_internet_gateway_resource();
    let mut eip = Resource::new("AWS::EC2::EIP", "eip").unwrap();
    eip.depends_on(&gateway);

    assert_eq!(
        eip.to_document().get("DependsOn"),
        Some(&json!(["gateway"]))
    );
}

#[test]
fn composite_flattening_preserves_preorder() {
    let r1 = Resource::new("AWS::Resource", "r1").unwrap();
    let r2 = Resource::new("AWS::Resource", "r2").unwrap();
    let r3 = Resource::new("AWS::Resource", "r3").unwrap();

    let mut b = CompositeResource::new();
    b.add(r2);
    b.add(r3);

    let mut a = CompositeResource::new();
    a.add(r1);
    a.add(b);

    let mut template = Template::new();
    template.add(a);

    let names: Vec<_> = template.resources().iter().map(Resource::name).collect();
    assert_eq!(names, vec!["r1", "r2", "r3"]);
}

#[test]
fn compile_to_json() {
    let template = full_template();

    let rendered = template.compile(OutputFormat::Json).unwrap();

    // The rendered document parses back to the logical document.
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed, template.to_document());

    // Spot-check formatting and content.
    assert!(rendered.contains("\"AWSTemplateFormatVersion\": \"2010-09-09\""));
    assert!(rendered.contains("\"CidrBlock\": \"10.0.0.0/16\""));
    assert!(rendered.contains("\"EnableDnsSupport\": false"));
    assert!(rendered.contains("\"Ref\": \"gateway\""));
    assert!(rendered.contains("\"DependsOn\": [\n        \"gateway\"\n      ]"));
}

#[test]
fn compile_json_preserves_resource_order() {
    let rendered = full_template().compile(OutputFormat::Json).unwrap();

    let position = |needle: &str| rendered.find(needle).expect(needle);
    assert!(position("\"vpc\"") < position("\"gateway\""));
    assert!(position("\"gateway\"") < position("\"attachment\""));
    assert!(position("\"attachment\"") < position("\"eip\""));
    assert!(position("\"eip\"") < position("\"MyEC2Instance\""));
    assert!(position("\"MyEC2Instance\"") < position("\"bucket.example.com\""));
}

#[test]
fn compile_json_key_order_within_resource() {
    let rendered = full_template().compile(OutputFormat::Json).unwrap();

    // Properties before Type, Type before DependsOn.
    let eip_block = &rendered[rendered.find("\"eip\"").unwrap()..];
    let position = |needle: &str| eip_block.find(needle).expect(needle);
    assert!(position("\"Properties\"") < position("\"Type\""));
    assert!(position("\"Type\"") < position("\"DependsOn\""));
}

#[test]
fn compile_to_yaml() {
    let template = full_template();

    let rendered = template.compile(OutputFormat::Yaml).unwrap();

    // The rendered document parses back to the logical document.
    let parsed: serde_json::Value = serde_yaml::from_str(&rendered).unwrap();
    assert_eq!(parsed, template.to_document());

    // Block style, unquoted literals.
    assert!(rendered.contains("Resources:\n"));
    assert!(rendered.contains("EnableDnsSupport: false"));
    assert!(rendered.contains("EnableDnsHostnames: true"));
    assert!(rendered.contains("Ref: gateway"));
    assert!(rendered.contains("DependsOn:\n"));
}

#[test]
fn compile_yaml_preserves_resource_order() {
    let rendered = full_template().compile(OutputFormat::Yaml).unwrap();

    let position = |needle: &str| rendered.find(needle).expect(needle);
    assert!(position("vpc:") < position("gateway:"));
    assert!(position("gateway:") < position("attachment:"));
    assert!(position("attachment:") < position("eip:"));
    assert!(position("eip:") < position("MyEC2Instance:"));
    assert!(position("MyEC2Instance:") < position("bucket.example.com:"));
}

#[test]
fn json_and_yaml_agree() {
    let template = full_template();

    let from_json: serde_json::Value =
        serde_json::from_str(&template.compile(OutputFormat::Json).unwrap()).unwrap();
    let from_yaml: serde_json::Value =
        serde_yaml::from_str(&template.compile(OutputFormat::Yaml).unwrap()).unwrap();

    assert_eq!(from_json, from_yaml);
}
