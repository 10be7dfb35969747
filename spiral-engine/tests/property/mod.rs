mod pipeline_properties;
